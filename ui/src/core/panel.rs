//! Open/closed state of the mobile navigation sheet.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelOpenFlag(bool);

impl PanelOpenFlag {
    pub fn is_open(self) -> bool {
        self.0
    }

    /// Menu trigger.
    pub fn toggled(self) -> Self {
        Self(!self.0)
    }

    /// Close button or overlay click.
    pub fn closed(self) -> Self {
        Self(false)
    }

    /// A nav link was followed. Only links inside the sheet close it; the
    /// desktop bar leaves the flag alone.
    pub fn after_follow(self, mobile: bool) -> Self {
        if mobile {
            self.closed()
        } else {
            self
        }
    }

    /// Sheet primitive reporting a new open state.
    pub fn with_open(self, open: bool) -> Self {
        Self(open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!PanelOpenFlag::default().is_open());
    }

    #[test]
    fn trigger_flips() {
        let open = PanelOpenFlag::default().toggled();
        assert!(open.is_open());
        assert!(!open.toggled().is_open());
    }

    #[test]
    fn following_a_mobile_link_closes() {
        let open = PanelOpenFlag::default().toggled();
        assert!(!open.after_follow(true).is_open());
        assert!(open.after_follow(false).is_open());
        assert!(!PanelOpenFlag::default().after_follow(true).is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let flag = PanelOpenFlag::default().with_open(true).closed();
        assert_eq!(flag, flag.closed());
    }
}
