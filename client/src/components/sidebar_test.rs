use super::*;

#[test]
fn sections_are_main_then_lists() {
    let headings: Vec<_> = NAV_SECTIONS.iter().map(|s| s.heading).collect();
    assert_eq!(headings, ["Main", "Lists"]);
}

#[test]
fn list_section_labels_in_order() {
    let labels: Vec<_> = NAV_SECTIONS[1].items.iter().map(|i| i.label).collect();
    assert_eq!(labels, ["Employee", "Projects", "Attendance", "Logout"]);
}

#[test]
fn only_logout_is_separated() {
    for section in NAV_SECTIONS {
        for item in section.items {
            assert_eq!(item.separated, item.label == "Logout", "{}", item.label);
        }
    }
}

#[test]
fn item_class_combines_theme_and_separator() {
    let logout = NAV_SECTIONS[1].items[3];
    assert_eq!(item_class(logout, false), "sidebar__item sidebar__item--separated");
    assert_eq!(
        item_class(logout, true),
        "sidebar__item sidebar__item--dark sidebar__item--separated"
    );

    let employee = NAV_SECTIONS[1].items[0];
    assert_eq!(item_class(employee, false), "sidebar__item");
}
