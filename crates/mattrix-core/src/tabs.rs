//! Tab View Router
//!
//! Three views, switched by the user or by a successful contact creation.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Contacts,
    Add,
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    Select(Tab),
    ContactCreated,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Contacts, Tab::Add, Tab::Stats];

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Contacts => "contacts",
            Tab::Add => "add",
            Tab::Stats => "stats",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Contacts => "👥 Contacts",
            Tab::Add => "➕ Add",
            Tab::Stats => "📊 Stats",
        }
    }

    pub fn transition(self, event: TabEvent) -> Tab {
        match event {
            TabEvent::Select(tab) => tab,
            TabEvent::ContactCreated => Tab::Contacts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        for from in Tab::ALL {
            for to in Tab::ALL {
                assert_eq!(from.transition(TabEvent::Select(to)), to);
            }
            assert_eq!(from.transition(TabEvent::ContactCreated), Tab::Contacts);
        }
    }

    #[test]
    fn test_keys_are_distinct() {
        assert_eq!(Tab::default(), Tab::Contacts);
        assert_eq!(Tab::ALL.map(|t| t.key()), ["contacts", "add", "stats"]);
    }
}
