//! One configuration record per rateable condition.

pub mod ankle_achilles;
pub mod cervical_spine;
pub mod hip_thigh;
pub mod knee;
pub mod lumbar_spine;
pub mod migraine;
pub mod plantar_fasciitis;
pub mod shoulder_arm;
pub mod tinnitus;

// Keyword sets shared by the musculoskeletal records. All lowercase.

// No bare "ache": it would match "headache".
pub(crate) const PAIN: &[&str] = &["pain", "aching", "achy", "sore"];

pub(crate) const LIMITED_MOTION: &[&str] = &["stiff", "limited", "cannot move", "frozen"];

pub(crate) const FLARE: &[&str] = &["flare", "swelling", "inflammation"];

pub(crate) const ANKYLOSIS: &[&str] = &["frozen", "ankylosis", "fused"];

pub(crate) const INSTABILITY: &[&str] = &["give way", "giving way", "gave way", "unstable", "instability", "buckl"];

pub(crate) const DEVICES: &[&str] = &["cane", "crutch", "walker", "wheelchair", "brace", "boot"];

pub(crate) const DEGREES: &[&str] = &["degree", "°"];
