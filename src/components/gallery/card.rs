//! Grid item for a single image.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::GalleryContext;
use crate::components::icons as ic;
use crate::models::ImageRecord;
use crate::utils::filename_from_url;

stylance::import_crate_style!(css, "src/components/gallery/card.module.css");

/// Thumbnail with view, download, share and delete actions.
#[component]
pub fn ImageCard(image: ImageRecord) -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");

    let url = image.url;
    let alt = filename_from_url(&url).unwrap_or("image").to_string();

    let on_view = {
        let url = url.clone();
        move |_: ev::MouseEvent| ctx.view(&url)
    };
    let on_download = {
        let url = url.clone();
        move |_: ev::MouseEvent| ctx.download(url.clone())
    };
    let on_share = {
        let url = url.clone();
        move |_: ev::MouseEvent| ctx.share(url.clone())
    };
    let on_delete = {
        let url = url.clone();
        move |_: ev::MouseEvent| ctx.delete(url.clone())
    };

    view! {
        <figure class=css::card role="listitem" data-id=image.id>
            <button class=css::thumbButton on:click=on_view.clone() title="View">
                <img class=css::thumb src=url alt=alt loading="lazy" />
            </button>
            <figcaption class=css::actions>
                <button class=css::action on:click=on_view title="View">
                    <Icon icon=ic::VIEW />
                </button>
                <button class=css::action on:click=on_download title="Download">
                    <Icon icon=ic::DOWNLOAD />
                </button>
                <button class=css::action on:click=on_share title="Copy link">
                    <Icon icon=ic::SHARE />
                </button>
                <button class=format!("{} {}", css::action, css::danger) on:click=on_delete title="Delete">
                    <Icon icon=ic::DELETE />
                </button>
            </figcaption>
        </figure>
    }
}
