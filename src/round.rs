pub trait Round {
    fn specific_round(&self, decimals: u32) -> f64;
}

impl Round for f64 {
    fn specific_round(&self, decimals: u32) -> f64 {
        let power = 10.0f64.powi(decimals as i32);
        (self * power).round() / power
    }
}
