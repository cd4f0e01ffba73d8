use core::fmt;

/// Datapoint type identifier, `main.sub` (e.g. `19.001`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DptId {
    pub main: u16,
    pub sub: u16,
}

impl DptId {
    pub const fn new(main: u16, sub: u16) -> Self {
        Self { main, sub }
    }
}

impl fmt::Display for DptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.main, self.sub)
    }
}

#[cfg(test)]
#[cfg(feature = "alloc")]
mod tests {
    use super::DptId;
    use alloc::string::ToString;

    #[test]
    fn display_pads_sub_number() {
        assert_eq!(DptId::new(19, 1).to_string(), "19.001");
        assert_eq!(DptId::new(9, 20).to_string(), "9.020");
    }

    #[test]
    fn ordering_is_main_then_sub() {
        assert!(DptId::new(9, 20) < DptId::new(19, 1));
        assert!(DptId::new(19, 1) < DptId::new(19, 2));
    }
}
