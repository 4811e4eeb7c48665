use super::*;

#[test]
fn tab_parameter_selects_tab() {
    assert_eq!(tab_from_param(Some("rentals")), ProfileTab::Rentals);
    assert_eq!(tab_from_param(Some("settings")), ProfileTab::Settings);
}

#[test]
fn missing_or_unknown_tab_opens_overview() {
    assert_eq!(tab_from_param(None), ProfileTab::Overview);
    assert_eq!(tab_from_param(Some("billing")), ProfileTab::Overview);
}

#[test]
fn view_all_shows_total() {
    assert_eq!(view_all_label(7), "View All (7)");
}

#[test]
fn blank_fields_read_na() {
    assert_eq!(or_na(None), "N/A");
    assert_eq!(or_na(Some("  ")), "N/A");
    assert_eq!(or_na(Some("ada@example.com")), "ada@example.com");
}
