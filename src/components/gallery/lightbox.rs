//! Lightbox modal for the selected image.
//!
//! Visibility is driven entirely by the `image` query parameter; closing
//! navigates instead of flipping local state, so the back button dismisses
//! it too.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::GalleryContext;
use crate::components::icons as ic;
use crate::utils::filename_from_url;

stylance::import_crate_style!(css, "src/components/gallery/lightbox.module.css");

/// Full-size view of `image` with download, share, delete and close actions.
#[component]
pub fn Lightbox(image: Signal<String>) -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");

    let filename = Memo::new(move |_| {
        image.with(|url| filename_from_url(url).unwrap_or("image").to_string())
    });

    // Handle keyboard events for closing
    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ctx.close();
        }
    };

    // Focus the container on mount for keyboard events
    let container_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(el) = container_ref.get() {
            let _ = el.focus();
        }
    });

    let on_download = move |_: ev::MouseEvent| ctx.download(image.get_untracked());
    let on_share = move |_: ev::MouseEvent| ctx.share(image.get_untracked());
    let on_delete = move |_: ev::MouseEvent| ctx.delete(image.get_untracked());

    view! {
        <div
            node_ref=container_ref
            tabindex="-1"
            class=css::backdrop
            role="dialog"
            aria-modal="true"
            on:keydown=handle_keydown
            on:click=move |_| ctx.close()
        >
            <div class=css::panel on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <header class=css::header>
                    <span class=css::filename title=move || image.get()>{filename}</span>
                    <div class=css::actions>
                        <button class=css::action on:click=on_download title="Download">
                            <Icon icon=ic::DOWNLOAD />
                        </button>
                        <button class=css::action on:click=on_share title="Copy link">
                            <Icon icon=ic::SHARE />
                        </button>
                        <button
                            class=format!("{} {}", css::action, css::danger)
                            on:click=on_delete
                            title="Delete"
                        >
                            <Icon icon=ic::DELETE />
                        </button>
                        <button class=css::action on:click=move |_| ctx.close() title="Close (Esc)">
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                </header>
                <div class=css::imageContainer>
                    <img class=css::image src=move || image.get() alt=filename />
                </div>
            </div>
        </div>
    }
}
