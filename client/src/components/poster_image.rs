//! Poster `<img>` that swaps to the placeholder after a load error.

#[cfg(test)]
#[path = "poster_image_test.rs"]
mod poster_image_test;

use leptos::prelude::*;

use crate::util::poster::poster_src;

/// Per-image poster state. A load error flips it to the placeholder for
/// good, so a broken placeholder cannot loop.
#[derive(Clone, Copy, Debug)]
pub struct PosterSource {
    src: StoredValue<String>,
    failed: RwSignal<bool>,
}

impl PosterSource {
    pub fn new(src: String) -> Self {
        Self { src: StoredValue::new(src), failed: RwSignal::new(false) }
    }

    /// URL to render now. Tracks the failure flag.
    pub fn current(&self) -> String {
        let failed = self.failed.get();
        self.src.with_value(|src| poster_src(src, failed))
    }

    pub fn mark_failed(&self) {
        self.failed.set(true);
    }

    pub fn has_failed(&self) -> bool {
        self.failed.get_untracked()
    }
}

#[component]
pub fn PosterImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let poster = PosterSource::new(src);
    view! {
        <img
            class=class
            src=move || poster.current()
            alt=alt
            loading="lazy"
            on:error=move |_| poster.mark_failed()
        />
    }
}
