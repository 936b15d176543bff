use std::fmt;

/// Identity of a run, derived once from the two route columns.
///
/// `name` is what gets written out; `number` is what picks the depot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RouteKey {
    name: String,
    number: Option<i64>,
}

impl RouteKey {
    pub fn new(part_a: &str, part_b: &str) -> Self {
        // Only the first ".0" is rewritten, whatever it is part of: "100.05" becomes "100:5".
        let key = format!("{part_a} {part_b}").replacen(".0", ":", 1);

        let number = key
            .split_whitespace()
            .next()
            .and_then(|token| token.replace(':', "").parse::<i64>().ok());

        Self {
            name: format!("Run {key}"),
            number,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> Option<i64> {
        self.number
    }

    pub fn depot(&self) -> Option<Depot> {
        self.number.and_then(Depot::for_route_number)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Depot {
    Bradford,
    Slough,
    Widnes,
    LeamingtonSpa,
    Cramlington,
}

impl Depot {
    pub fn for_route_number(number: i64) -> Option<Self> {
        match number {
            1..=60 => Some(Depot::Bradford),
            90..=110 => Some(Depot::Slough),
            150..=170 => Some(Depot::Widnes),
            180..=190 => Some(Depot::LeamingtonSpa),
            200..=225 => Some(Depot::Cramlington),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Depot::Bradford => "Bradford Depot",
            Depot::Slough => "Slough Depot",
            Depot::Widnes => "Widnes Depot",
            Depot::LeamingtonSpa => "Leamington Spa Depot",
            Depot::Cramlington => "Cramlington Depot",
        }
    }
}

impl fmt::Display for Depot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_first_point_zero_only() {
        let key = RouteKey::new("12", "3.0");
        assert_eq!(key.name(), "Run 12 3:0");
        assert_eq!(key.number(), Some(12));

        let key = RouteKey::new("45.0", "7.0");
        assert_eq!(key.name(), "Run 45: 7.0");
        assert_eq!(key.number(), Some(45));
    }

    #[test]
    fn point_zero_inside_a_longer_number_is_rewritten_literally() {
        let key = RouteKey::new("100.05", "A");
        assert_eq!(key.name(), "Run 100:5 A");
        assert_eq!(key.number(), Some(1005));
    }

    #[test]
    fn differently_formatted_numbers_give_different_names() {
        assert_ne!(RouteKey::new("3.0", "B"), RouteKey::new("3", "B"));
        assert_eq!(RouteKey::new("3.0", "B").number(), Some(3));
        assert_eq!(RouteKey::new("3", "B").number(), Some(3));
    }

    #[test]
    fn number_missing_when_not_numeric() {
        assert_eq!(RouteKey::new("North", "1").number(), None);
        assert_eq!(RouteKey::new("", "").number(), None);
        assert_eq!(RouteKey::new("", "").depot(), None);
    }

    #[test]
    fn empty_first_part_falls_through_to_second() {
        let key = RouteKey::new("", "95");
        assert_eq!(key.name(), "Run  95");
        assert_eq!(key.depot(), Some(Depot::Slough));
    }

    #[test]
    fn depot_ranges_are_inclusive() {
        let cases = [
            (0, None),
            (1, Some(Depot::Bradford)),
            (45, Some(Depot::Bradford)),
            (60, Some(Depot::Bradford)),
            (75, None),
            (90, Some(Depot::Slough)),
            (95, Some(Depot::Slough)),
            (110, Some(Depot::Slough)),
            (150, Some(Depot::Widnes)),
            (170, Some(Depot::Widnes)),
            (175, None),
            (180, Some(Depot::LeamingtonSpa)),
            (190, Some(Depot::LeamingtonSpa)),
            (200, Some(Depot::Cramlington)),
            (225, Some(Depot::Cramlington)),
            (226, None),
            (-5, None),
        ];

        for (number, depot) in cases {
            assert_eq!(Depot::for_route_number(number), depot, "route {number}");
        }
    }

    #[test]
    fn depot_names() {
        assert_eq!(Depot::LeamingtonSpa.to_string(), "Leamington Spa Depot");
        assert_eq!(RouteKey::new("45", "X").depot().map(|d| d.name()), Some("Bradford Depot"));
    }
}
