//! Main menu choices

/// The menu line shown before every prompt
pub const MENU_LINE: &str = "1) Add  2) View  3) Search  4) Update  5) Delete  6) Save  7) Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Update,
    Delete,
    Save,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Update),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::Save),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add",
            MenuChoice::View => "View",
            MenuChoice::Search => "Search",
            MenuChoice::Update => "Update",
            MenuChoice::Delete => "Delete",
            MenuChoice::Save => "Save",
            MenuChoice::Exit => "Exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_menu_line() {
        for n in 1..=7 {
            let choice = MenuChoice::parse(&n.to_string()).expect("listed choice");
            assert!(MENU_LINE.contains(&format!("{}) {}", n, choice.as_str())));
        }
    }

    #[test]
    fn test_parse_rejects_other_input() {
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Update));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("add"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
