/// Number of axes in a sensor reading.
pub const N_XYZ_COORDINATES: usize = 3;
