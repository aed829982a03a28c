/// Returns the resistance on the ground side of a divider whose supply side
/// is `known_resistance`, given the voltage `volts` across it.
///
/// Returns `0.0` when the reading sits on or outside the supply rails, where
/// the divider law has no finite positive solution.
pub fn estimate(volts: f32, reference_voltage: f32, known_resistance: f32) -> f32 {
    if volts >= reference_voltage || volts <= 0.0 {
        return 0.0;
    }

    known_resistance * volts / (reference_voltage - volts)
}
