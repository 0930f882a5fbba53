//! Avatar upload control with a local preview.
//!
//! SYSTEM CONTEXT
//! ==============
//! The "Upload" button clicks a hidden `<input type="file">`. A picked file
//! is read in the background and the payload lands in the page-owned
//! `PreviewState` when the read completes. Cancelling the picker fires no
//! change and leaves the preview as it was. Read failures are logged only.

#[cfg(test)]
#[path = "image_upload_test.rs"]
mod image_upload_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icon::{Icon, IconKind};
use crate::state::preview::PreviewState;
use crate::util::dark_mode::themed;
use crate::util::image_preview;

/// Register a read for the picked file and hand back its ticket with the
/// file. A cancelled picker (`None`) leaves `preview` untouched.
pub fn start_preview_read<F>(preview: RwSignal<PreviewState>, file: Option<F>) -> Option<(u64, F)> {
    let file = file?;
    let mut ticket = 0;
    preview.update(|p| ticket = p.begin_read());
    Some((ticket, file))
}

fn preview_class(has_image: bool) -> &'static str {
    if has_image { "image-upload__preview image-upload__preview--filled" } else { "image-upload__preview" }
}

#[component]
pub fn ImageUpload(#[prop(into)] dark: Signal<bool>, preview: RwSignal<PreviewState>) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Read counters change on every pick; only a new payload re-renders.
    let data_url = Memo::new(move |_| preview.with(|p| p.data_url.clone()));
    let has_image = Memo::new(move |_| preview.with(PreviewState::has_image));

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some((ticket, file)) = start_preview_read(preview, image_preview::selected_file(&input)) else {
                return;
            };
            log::debug!(
                "preview read {ticket} started: {} ({} bytes, {} in flight)",
                file.name(),
                file.size(),
                preview.with_untracked(PreviewState::in_flight)
            );

            leptos::task::spawn_local(async move {
                match image_preview::read_as_data_url(&file).await {
                    Ok(data_url) => {
                        log::debug!("preview read {ticket} completed ({} chars)", data_url.len());
                        preview.update(|p| p.complete_read(ticket, data_url));
                    }
                    Err(e) => log::warn!("preview read {ticket} failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_upload = move |_| image_preview::open_picker(input_ref);

    view! {
        <div class="image-upload">
            <div class=move || preview_class(has_image.get())>
                {move || match data_url.get() {
                    Some(url) => view! { <img class="image-upload__image" src=url alt="Preview"/> }.into_any(),
                    None => {
                        view! {
                            <div class="image-upload__placeholder">
                                <Icon kind=IconKind::Users size=32 class="image-upload__placeholder-icon"/>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
            <div>
                <p class=move || themed("image-upload__label", dark.get())>"Image:"</p>
                <input
                    type="file"
                    class="image-upload__input"
                    accept=image_preview::ACCEPT
                    node_ref=input_ref
                    on:change=on_change
                />
                <button class=move || themed("image-upload__button", dark.get()) on:click=on_upload>
                    <Icon kind=IconKind::Upload size=16/>
                    "Upload"
                </button>
            </div>
        </div>
    }
}
