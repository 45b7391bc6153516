use crate::core::model::SafetyAssessment;

pub fn assess(peak_height_m: f64, critical_fall_height_m: f64) -> SafetyAssessment {
    let is_adverse = peak_height_m > critical_fall_height_m;
    let message = if is_adverse {
        format!(
            "Peak height {peak_height_m:.2} m exceeds the critical fall height of \
             {critical_fall_height_m:.1} m. Warning: a fall from this height carries a high risk of injury."
        )
    } else {
        format!(
            "Peak height {peak_height_m:.2} m is within the critical fall height of \
             {critical_fall_height_m:.1} m. A fall from this height is low risk."
        )
    };

    SafetyAssessment {
        is_adverse,
        message,
    }
}
