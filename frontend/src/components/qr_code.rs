use cofrap_shared::api::png_data_uri;
use gloo::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QrCodeProps {
    /// Base64 PNG without the `data:` prefix.
    pub data: AttrValue,
    #[prop_or(AttrValue::Static("QR Code"))]
    pub alt: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

/// Renders nothing for empty data. A failed image load is replaced by a
/// text fallback and never retried.
#[function_component(QrCode)]
pub fn qr_code(props: &QrCodeProps) -> Html {
    let image_failed = use_state(|| false);

    let Some(src) = png_data_uri(&props.data) else {
        return html! {};
    };

    if *image_failed {
        return html! {
            <div class="flex items-center justify-center p-8 bg-gray-100 rounded-lg">
                <p class="text-gray-500">{"Impossible de charger le QR code"}</p>
            </div>
        };
    }

    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| {
            console::warn!("QR code image failed to load");
            image_failed.set(true);
        })
    };

    html! {
        <div class="flex flex-col items-center gap-4">
            if let Some(title) = props.title.clone() {
                <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
            }
            <div class="p-4 bg-white rounded-lg border-2 border-gray-200">
                <img
                    {src}
                    alt={props.alt.clone()}
                    class="w-64 h-64 md:w-80 md:h-80"
                    loading="lazy"
                    {onerror}
                />
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::test_util::{find, scratch_root, settle};
    use wasm_bindgen_test::*;
    use web_sys::Event;

    const PIXEL_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

    fn props(data: &'static str) -> QrCodeProps {
        QrCodeProps {
            data: AttrValue::Static(data),
            alt: AttrValue::Static("QR Code"),
            title: None,
        }
    }

    #[wasm_bindgen_test]
    async fn test_failed_image_falls_back_without_retry() {
        let root = scratch_root();
        let _app = yew::Renderer::<QrCode>::with_root_and_props(root.clone(), props(PIXEL_PNG)).render();
        settle().await;

        let img = find(&root, "img").expect("image rendered");
        assert_eq!(
            img.get_attribute("src").as_deref(),
            Some(format!("data:image/png;base64,{}", PIXEL_PNG).as_str())
        );

        img.dispatch_event(&Event::new("error").expect("event"))
            .expect("dispatch");
        settle().await;

        assert!(find(&root, "img").is_none());
        assert!(root
            .text_content()
            .unwrap_or_default()
            .contains("Impossible de charger le QR code"));

        // stays on the fallback
        settle().await;
        assert!(find(&root, "img").is_none());
    }

    #[wasm_bindgen_test]
    async fn test_empty_data_renders_nothing() {
        let root = scratch_root();
        let _app = yew::Renderer::<QrCode>::with_root_and_props(root.clone(), props("")).render();
        settle().await;

        assert!(find(&root, "img").is_none());
        assert_eq!(root.text_content().unwrap_or_default(), "");
    }
}
