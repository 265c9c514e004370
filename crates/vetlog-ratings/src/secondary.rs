//! Commonly claimed secondary conditions.
//!
//! Static reference data only; nothing here changes an analysis.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecondaryCondition {
    pub condition: &'static str,
    pub connection: &'static str,
}

const fn secondary(condition: &'static str, connection: &'static str) -> SecondaryCondition {
    SecondaryCondition {
        condition,
        connection,
    }
}

const ALTERED_GAIT: &[SecondaryCondition] = &[
    secondary("Knee condition", "Altered gait shifts load onto the knee."),
    secondary("Hip condition", "Favoring one leg strains the opposite hip."),
    secondary("Lumbar strain", "Uneven stride changes lower back mechanics."),
];

const SPINE: &[SecondaryCondition] = &[
    secondary(
        "Radiculopathy",
        "Nerve root irritation from the spine can be rated separately per extremity.",
    ),
    secondary("Depression", "Chronic pain is associated with depressive disorders."),
    secondary("Sleep disturbance", "Pain that interrupts sleep is worth documenting."),
];

const SHOULDER: &[SecondaryCondition] = &[
    secondary("Cervical strain", "Guarding a painful shoulder loads the neck."),
    secondary("Depression", "Chronic pain is associated with depressive disorders."),
];

const MIGRAINE: &[SecondaryCondition] = &[
    secondary("Depression", "Frequent prostrating attacks affect mood and work."),
    secondary("Insomnia", "Attack-related sleep loss is commonly claimed alongside migraine."),
];

const TINNITUS: &[SecondaryCondition] = &[
    secondary("Hearing loss", "Noise exposure causing tinnitus often affects hearing."),
    secondary("Anxiety", "Persistent ringing is associated with anxiety and poor sleep."),
];

/// Secondary conditions commonly linked to `condition_id`.
pub fn for_condition(condition_id: &str) -> &'static [SecondaryCondition] {
    match condition_id {
        "ankle_achilles" | "plantar_fasciitis" | "knee" | "hip_thigh" => ALTERED_GAIT,
        "lumbar_spine" | "cervical_spine" => SPINE,
        "shoulder_arm" => SHOULDER,
        "migraine" => MIGRAINE,
        "tinnitus" => TINNITUS,
        _ => &[],
    }
}
