//! Main gallery page.
//!
//! Shows the visible slice of the image list in a responsive grid. The
//! initial list fetch is issued once, when the component mounts.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::card::ImageCard;
use super::toast::Toasts;
use crate::app::GalleryContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::GalleryState;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

fn count_label(count: usize) -> String {
    match count {
        1 => "1 image".to_string(),
        n => format!("{} images", n),
    }
}

/// Gallery page component.
#[component]
pub fn Gallery() -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");
    let gallery = ctx.gallery;

    ctx.refresh();

    let loading = Memo::new(move |_| gallery.with(|s| s.loading));
    let error = Memo::new(move |_| gallery.with(|s| s.error.clone()));
    let visible = Memo::new(move |_| gallery.with(|s| s.visible().to_vec()));
    let has_more = Memo::new(move |_| gallery.with(GalleryState::has_more));
    let count = Memo::new(move |_| gallery.with(|s| s.images.len()));
    let is_empty =
        Signal::derive(move || !loading.get() && error.with(Option::is_none) && count.get() == 0);

    view! {
        <div class=css::page>
            <header class=css::header>
                <h1 class=css::title>
                    <span class=css::titleIcon><Icon icon=ic::IMAGE /></span>
                    {APP_NAME}
                </h1>
                <span class=css::count>{move || count_label(count.get())}</span>
            </header>

            <Show when=move || error.with(Option::is_some)>
                <div class=css::errorBanner role="alert">
                    <Icon icon=ic::WARNING />
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || loading.get()
                fallback=move || view! {
                    <div class=css::grid role="list">
                        // Ids are positional, so the url is part of the key
                        <For
                            each=move || visible.get()
                            key=|image| (image.id.clone(), image.url.clone())
                            children=move |image| view! { <ImageCard image=image /> }
                        />
                    </div>
                }
            >
                <div class=css::loading>
                    <span>"Loading images..."</span>
                </div>
            </Show>

            <Show when=move || is_empty.get()>
                <p class=css::empty>"No images yet."</p>
            </Show>

            <Show when=move || has_more.get()>
                <div class=css::loadMoreRow>
                    <button class=css::loadMore on:click=move |_| ctx.load_more()>
                        "Load more"
                    </button>
                </div>
            </Show>

            <Toasts />
        </div>
    }
}
