//! Bottom-corner toasts: the "link copied" indicator and notices.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::GalleryContext;
use crate::components::icons as ic;
use crate::models::NoticeLevel;

stylance::import_crate_style!(css, "src/components/gallery/toast.module.css");

#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");
    let gallery = ctx.gallery;
    let notice = ctx.notice;

    let copied = Memo::new(move |_| gallery.with(|s| s.copied));

    view! {
        <div class=css::stack aria-live="polite">
            <Show when=move || copied.get()>
                <div class=css::toast>
                    <Icon icon=ic::CHECK />
                    <span>"Link copied to clipboard"</span>
                </div>
            </Show>
            {move || notice.get().map(|n| {
                let class = match n.level {
                    NoticeLevel::Info => css::toast.to_string(),
                    NoticeLevel::Error => format!("{} {}", css::toast, css::error),
                };
                view! {
                    <div class=class role="status">
                        <Icon icon=ic::WARNING />
                        <span>{n.message}</span>
                        <button
                            class=css::dismiss
                            on:click=move |_| notice.set(None)
                            title="Dismiss"
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
