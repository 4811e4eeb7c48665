//! Site footer.

use leptos::prelude::*;

const QUICK_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/browse", "Browse"),
    ("/top-rentals", "Top Rentals"),
    ("/wishlist", "Wishlist"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__logo">"Marquee"</span>
                <p>"Rent the latest blockbusters and timeless classics."</p>
            </div>
            <nav class="footer__links">
                <h3>"Quick Links"</h3>
                <ul>
                    {QUICK_LINKS
                        .iter()
                        .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
                        .collect_view()}
                </ul>
            </nav>
            <div class="footer__contact">
                <h3>"Contact Us"</h3>
                <p>"support@marquee.example"</p>
            </div>
        </footer>
    }
}
