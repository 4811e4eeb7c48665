use super::*;

#[test]
fn genre_links_target_browse_filter() {
    assert_eq!(genre_href("Action"), "/browse?genre=Action");
    assert_eq!(genre_href("Sci-Fi"), "/browse?genre=Sci-Fi");
    assert_eq!(genre_href("Film Noir"), "/browse?genre=Film%20Noir");
}

#[test]
fn genre_links_escape_reserved_characters() {
    assert_eq!(genre_href("100% Docs"), "/browse?genre=100%25%20Docs");
    assert_eq!(genre_href("Rock & Roll"), "/browse?genre=Rock%20%26%20Roll");
    assert_eq!(genre_href("Kids/Family?"), "/browse?genre=Kids%2FFamily%3F");
}

#[test]
fn featured_window_grows_to_longest_row() {
    let longest = featured_rows().iter().map(|(_, m)| m.len()).max().unwrap_or_default();
    let mut window = FEATURED_PAGE;
    assert_eq!(window.visible(longest), 4);
    window.load_more(longest);
    assert_eq!(window.visible(longest), longest.min(8));
    window.load_more(longest);
    assert!(!window.has_more(longest));
}
