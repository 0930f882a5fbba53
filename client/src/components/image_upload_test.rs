use super::*;

// =============================================================
// start_preview_read
// =============================================================

#[test]
fn cancelled_pick_leaves_preview_untouched() {
    let owner = Owner::new();
    owner.with(|| {
        let preview = RwSignal::new(PreviewState::default());
        let first = start_preview_read(preview, Some("first.png"));
        assert!(first.is_some());
        preview.update(|p| p.complete_read(1, "data:image/png;base64,AAAA".to_owned()));
        let before = preview.get_untracked();

        assert_eq!(start_preview_read::<&str>(preview, None), None);
        assert_eq!(preview.get_untracked(), before);
    });
}

#[test]
fn picked_file_gets_a_ticket_without_touching_payload() {
    let owner = Owner::new();
    owner.with(|| {
        let preview = RwSignal::new(PreviewState::default());

        assert_eq!(start_preview_read(preview, Some("a.png")), Some((1, "a.png")));
        assert_eq!(start_preview_read(preview, Some("b.png")), Some((2, "b.png")));

        let state = preview.get_untracked();
        assert_eq!(state.reads_started, 2);
        assert_eq!(state.in_flight(), 2);
        assert!(!state.has_image());
    });
}

#[test]
fn preview_class_marks_filled_preview() {
    assert_eq!(preview_class(false), "image-upload__preview");
    assert_eq!(preview_class(true), "image-upload__preview image-upload__preview--filled");
}

// =============================================================
// Rendering
// =============================================================

#[cfg(feature = "ssr")]
fn render_upload(state: PreviewState) -> String {
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    owner.with(|| {
        let preview = RwSignal::new(state);
        view! { <ImageUpload dark=Signal::stored(false) preview=preview/> }.to_html()
    })
}

#[cfg(feature = "ssr")]
#[test]
fn renders_placeholder_without_payload() {
    let html = render_upload(PreviewState::default());
    assert!(html.contains("image-upload__placeholder"), "{html}");
    assert!(!html.contains("<img"), "{html}");
}

#[cfg(feature = "ssr")]
#[test]
fn renders_image_once_payload_is_stored() {
    let mut state = PreviewState::default();
    let ticket = state.begin_read();
    state.complete_read(ticket, "data:image/png;base64,AAAA".to_owned());

    let html = render_upload(state);
    assert!(html.contains("<img"), "{html}");
    assert!(html.contains(r#"src="data:image/png;base64,AAAA""#), "{html}");
    assert!(html.contains("image-upload__preview--filled"), "{html}");
    assert!(!html.contains("image-upload__placeholder"), "{html}");
}

#[cfg(feature = "ssr")]
#[test]
fn pending_read_keeps_placeholder() {
    let mut state = PreviewState::default();
    let _ = state.begin_read();

    let html = render_upload(state);
    assert!(html.contains("image-upload__placeholder"), "{html}");
    assert!(!html.contains("<img"), "{html}");
}

#[cfg(feature = "ssr")]
#[test]
fn file_input_only_accepts_images() {
    let html = render_upload(PreviewState::default());
    assert!(html.contains(r#"type="file""#), "{html}");
    assert!(html.contains(r#"accept="image/*""#), "{html}");
}
