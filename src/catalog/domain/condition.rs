/// Display metadata for a product condition grade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionGrade {
    pub value: &'static str,
    pub label: &'static str,
}

/// Condition grades offered by the storefront, best first
pub const CONDITIONS: &[ConditionGrade] = &[
    ConditionGrade { value: "Mint", label: "Mint" },
    ConditionGrade { value: "Near Mint", label: "Near Mint" },
    ConditionGrade { value: "Excellent", label: "Excellent" },
    ConditionGrade { value: "Good", label: "Good" },
    ConditionGrade { value: "Fair", label: "Fair" },
    ConditionGrade { value: "Poor", label: "Poor" },
    ConditionGrade { value: "CGC Graded", label: "CGC Graded" },
    ConditionGrade { value: "PSA Graded", label: "PSA Graded" },
    ConditionGrade { value: "BGS Graded", label: "BGS Graded" },
];

/// Looks up the grade whose value matches exactly
pub fn find_condition(value: &str) -> Option<&'static ConditionGrade> {
    CONDITIONS.iter().find(|c| c.value == value)
}
