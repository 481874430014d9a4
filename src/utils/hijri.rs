/// Static Hijri approximation. A faithful conversion needs a lunar calendar
/// table; until one is wired in, the header shows a fixed day in Ramzan that
/// is adjusted by hand when the constants are updated.
const HIJRI_DAY: u32 = 2;
const HIJRI_MONTH: &str = "Ramzan";
const HIJRI_YEAR: u32 = 1447;

pub fn approximate_date() -> String {
    format!("{:02} {} {}", HIJRI_DAY, HIJRI_MONTH, HIJRI_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_is_zero_padded() {
        assert_eq!(approximate_date(), "02 Ramzan 1447");
    }
}
