//! Session-gated profile dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Once the session resolves to a user with an id, the dashboard fetches the
//! wishlist/rentals/subscription bundle immediately and every 30 seconds.
//! Each refresh is a cancellable cycle (`util::poll`): a newer cycle aborts an
//! older one still waiting on the network, and leaving the page aborts both.
//!
//! The wishlist tab is a local wishlist view like the navbar badge, so a
//! removal anywhere shows up here without waiting for the next refresh.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use catalog::{Movie, Rental};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::poster_image::PosterImage;
use crate::net::api::{SIGN_IN_URL, SIGN_OUT_URL};
use crate::net::types::SessionUser;
use crate::state::auth::{AuthState, Gate};
use crate::state::profile::{ProfileState, ProfileTab, RENTALS_PREVIEW};
use crate::state::toast::ToastState;
use crate::state::wishlist::{DASHBOARD_PREVIEW, WishlistSnapshot};
use crate::util::wishlist_sync::mount_wishlist_view;

pub fn tab_from_param(raw: Option<&str>) -> ProfileTab {
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}

pub fn view_all_label(count: usize) -> String {
    format!("View All ({count})")
}

/// Field text with the dashboard's "N/A" placeholder.
pub fn or_na(value: Option<&str>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("N/A").to_owned()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gate = Memo::new(move |_| auth.with(AuthState::gate));

    move || match gate.get() {
        Gate::Loading => view! {
            <div class="profile profile--loading" aria-busy="true">
                <div class="skeleton skeleton--title"></div>
                <div class="skeleton skeleton--panel"></div>
            </div>
        }
        .into_any(),
        Gate::SignIn => view! {
            <div class="profile profile--denied">
                <div class="profile__gate">
                    <h1>"Access Denied"</h1>
                    <p>"Step into the spotlight and sign in to unlock your cinematic profile!"</p>
                    <a href=SIGN_IN_URL class="btn btn--primary">"Sign In Now"</a>
                </div>
            </div>
        }
        .into_any(),
        Gate::MissingUser => view! {
            <div class="profile profile--denied">
                <p class="profile__error">"Session data unavailable. Please sign in again."</p>
            </div>
        }
        .into_any(),
        Gate::Ready(user) => view! { <ProfileDashboard user/> }.into_any(),
    }
}

#[component]
fn ProfileDashboard(user: SessionUser) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_query_map();
    let profile = RwSignal::new(ProfileState {
        tab: tab_from_param(params.with_untracked(|p| p.get("tab")).as_deref()),
        ..ProfileState::default()
    });
    let snapshot = mount_wishlist_view();

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::fetch_profile_bundle;
        use crate::util::poll::{PROFILE_POLL_SECS, spawn_polling};

        let user_id = user.id.clone();
        let handle = spawn_polling(std::time::Duration::from_secs(PROFILE_POLL_SECS), move || {
            let user_id = user_id.clone();
            async move {
                profile.update(ProfileState::begin_load);
                match fetch_profile_bundle(&user_id).await {
                    Ok(bundle) => profile.update(|p| p.apply_bundle(bundle)),
                    Err(err) => {
                        log::warn!("profile refresh failed: {err}");
                        profile.update(|p| p.apply_error(&err));
                        crate::components::toast_host::push_error(toasts, err.user_message());
                    }
                }
            }
        });
        on_cleanup(move || drop(handle));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
    }

    let name = user.display_name().to_owned();
    let initial = user.initial();
    let avatar = user.image.clone().filter(|src| !src.is_empty());
    let tab = move || profile.with(|p| p.tab);

    view! {
        <div class="profile">
            <section class="profile__hero">
                {match avatar {
                    Some(src) => view! { <PosterImage src alt=name.clone() class="profile__avatar"/> }.into_any(),
                    None => view! { <span class="profile__avatar profile__avatar--initial">{initial}</span> }.into_any(),
                }}
                <div>
                    <h1 class="profile__name">{name.clone()}</h1>
                    <p>"Your Movie Journey Begins Here"</p>
                    <span class="badge">"Premium Member"</span>
                </div>
            </section>

            <section class="profile__dashboard">
                <header class="profile__dashboard-header">
                    <h2>"Your Cinematic Dashboard"</h2>
                    <Show when=move || profile.with(|p| p.loading)>
                        <span class="profile__refreshing">"Refreshing…"</span>
                    </Show>
                </header>
                <div class="tabs" role="tablist">
                    {ProfileTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tabs__trigger"
                                    class:tabs__trigger--active=move || tab() == t
                                    role="tab"
                                    on:click=move |_| profile.update(|p| p.tab = t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || profile.with(|p| p.error.clone()).map(|message| view! { <p class="profile__error">{message}</p> })}
                {move || match tab() {
                    ProfileTab::Overview => view! { <OverviewTab user=user.clone() profile/> }.into_any(),
                    ProfileTab::Wishlist => view! { <WishlistTab snapshot/> }.into_any(),
                    ProfileTab::Rentals => view! { <RentalsTab profile/> }.into_any(),
                    ProfileTab::Settings => view! { <SettingsTab user=user.clone() profile/> }.into_any(),
                }}
                <footer class="profile__footer">
                    <a href="/profile?tab=settings" class="btn btn--outline">"Update Profile"</a>
                    <a href=SIGN_OUT_URL class="btn btn--outline">"Sign Out"</a>
                </footer>
            </section>
        </div>
    }
}

#[component]
fn OverviewTab(user: SessionUser, profile: RwSignal<ProfileState>) -> impl IntoView {
    view! {
        <div class="profile__grid">
            <article class="panel">
                <h3>"Personal Details"</h3>
                <p>"Email: " {or_na(user.email.as_deref())}</p>
                <p>"Joined: " {or_na(user.join_date.as_deref())}</p>
            </article>
            {move || {
                profile
                    .with(|p| p.subscription.clone())
                    .map(|sub| {
                        view! {
                            <article class="panel">
                                <h3>"Subscription"</h3>
                                <p>"Plan: " {sub.plan}</p>
                                <p>"Status: " {sub.status.label()} " | Expires: " {sub.expiry_date}</p>
                            </article>
                        }
                    })
            }}
        </div>
        <article class="panel">
            <h3>"Recent Activity"</h3>
            <Show
                when=move || profile.with(|p| !p.recent_activity.is_empty())
                fallback=|| view! { <p class="muted">"No recent activity. Start renting movies!"</p> }
            >
                <ul class="profile__activity">
                    {move || {
                        profile
                            .with(|p| p.recent_activity.clone())
                            .into_iter()
                            .map(|line| view! { <li>{line}</li> })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </article>
    }
}

#[component]
fn WishlistTab(snapshot: RwSignal<WishlistSnapshot>) -> impl IntoView {
    let count = move || snapshot.with(WishlistSnapshot::count);
    view! {
        <h3 class="profile__section-title">"My Cinema Wishlist" <span class="badge">{count}</span></h3>
        <Show
            when=move || { count() > 0 }
            fallback=|| view! { <p class="muted">"Your wishlist is empty. Add some blockbuster hits!"</p> }
        >
            <div class="profile__cards">
                {move || {
                    snapshot
                        .with(|s| s.preview(DASHBOARD_PREVIEW))
                        .into_iter()
                        .map(|movie| view! { <DashboardMovie movie/> })
                        .collect_view()
                }}
            </div>
        </Show>
        <Show when=move || snapshot.with(|s| s.has_overflow(DASHBOARD_PREVIEW))>
            <a href="/wishlist" class="profile__view-all">{move || view_all_label(count())}</a>
        </Show>
    }
}

#[component]
fn DashboardMovie(movie: Movie) -> impl IntoView {
    let Movie { title, image, year, genre, rating, .. } = movie;
    view! {
        <article class="dashboard-card">
            <PosterImage src=image alt=title.clone() class="dashboard-card__poster"/>
            <h4>{title}</h4>
            <p class="muted">{format!("{year} | {genre}")}</p>
            <p class="dashboard-card__rating">{format!("★ {rating:.1}")}</p>
        </article>
    }
}

#[component]
fn RentalsTab(profile: RwSignal<ProfileState>) -> impl IntoView {
    let count = move || profile.with(|p| p.rentals.len());
    view! {
        <h3 class="profile__section-title">"My Active Rentals" <span class="badge">{count}</span></h3>
        <Show
            when=move || { count() > 0 }
            fallback=|| view! { <p class="muted">"No rentals yet. Rent a movie and enjoy the show!"</p> }
        >
            <div class="profile__cards">
                {move || {
                    profile
                        .with(|p| p.rentals.iter().take(RENTALS_PREVIEW).cloned().collect::<Vec<_>>())
                        .into_iter()
                        .map(|rental| view! { <DashboardRental rental/> })
                        .collect_view()
                }}
            </div>
        </Show>
        <Show when=move || { count() > RENTALS_PREVIEW }>
            <a href="/my-rentals" class="profile__view-all">{move || view_all_label(count())}</a>
        </Show>
    }
}

#[component]
fn DashboardRental(rental: Rental) -> impl IntoView {
    let Rental { movie, rental_date, due_date, status, .. } = rental;
    view! {
        <article class="dashboard-card">
            <PosterImage src=movie.image alt=movie.title.clone() class="dashboard-card__poster"/>
            <h4>{movie.title}</h4>
            <p class="muted">{format!("Rented: {rental_date} | Due: {due_date}")}</p>
            <span class={format!("badge {}", status.badge_class())}>{status.label()}</span>
        </article>
    }
}

#[component]
fn SettingsTab(user: SessionUser, profile: RwSignal<ProfileState>) -> impl IntoView {
    view! {
        <h3 class="profile__section-title">"Account Settings"</h3>
        <div class="profile__grid">
            <article class="panel">
                <h3>"Personal Info"</h3>
                <p>"Name: " {or_na(user.name.as_deref())}</p>
                <p>"Email: " {or_na(user.email.as_deref())}</p>
                <p>"Phone: " {or_na(user.phone.as_deref())}</p>
            </article>
            <article class="panel">
                <h3>"Subscription"</h3>
                {move || match profile.with(|p| p.subscription.clone()) {
                    Some(sub) => view! {
                        <p>"Plan: " {sub.plan}</p>
                        <p>"Status: " {sub.status.label()}</p>
                        <p>"Expires: " {sub.expiry_date}</p>
                    }
                    .into_any(),
                    None => view! { <p class="muted">"No subscription active."</p> }.into_any(),
                }}
            </article>
        </div>
    }
}
