use log::warn;
use web_sys::{window, HtmlElement};
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn root_element() -> Option<HtmlElement> {
    window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

#[derive(Properties, PartialEq)]
pub struct AnimationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Smooth in-page scrolling plus the keyframes and utility classes the
/// animated sections share.
#[function_component(AnimationProvider)]
pub fn animation_provider(props: &AnimationProviderProps) -> Html {
    use_effect_with_deps(
        move |_| {
            let previous = root_element().map(|root| {
                let style = root.style();
                let previous = style.get_property_value("scroll-behavior").unwrap_or_default();
                if let Err(e) = style.set_property("scroll-behavior", "smooth") {
                    warn!("Could not enable smooth scrolling: {:?}", e);
                }
                (style, previous)
            });
            move || {
                if let Some((style, previous)) = previous {
                    let _ = style.set_property("scroll-behavior", &previous);
                }
            }
        },
        (),
    );

    html! {
        <>
            { for props.children.iter() }
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: 'Inter', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                        -webkit-font-smoothing: antialiased;
                        color: #1F3D2B;
                        background: #F7F9F6;
                    }
                    .serif {
                        font-family: 'Playfair Display', serif;
                        font-style: italic;
                        font-weight: 700;
                    }
                    .logo-square,
                    .logo-circle {
                        width: 1rem;
                        height: 1rem;
                        background: #2E7D5A;
                    }
                    .logo-square {
                        border-radius: 2px;
                    }
                    .logo-circle {
                        border-radius: 50%;
                    }
                    .logo-triangle {
                        width: 0;
                        height: 0;
                        border-left: 8px solid transparent;
                        border-right: 8px solid transparent;
                        border-bottom: 14px solid #2E7D5A;
                    }
                    .bounce {
                        animation: bounce 1s infinite;
                    }
                    .pulse {
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    .text-reveal {
                        display: inline-block;
                        perspective: 1000px;
                    }
                    .text-reveal-unit {
                        display: inline-block;
                        opacity: 0;
                        transform: translateY(50px) rotateX(-90deg);
                        transform-origin: center bottom;
                    }
                    .text-reveal--visible .text-reveal-unit {
                        opacity: 1;
                        transform: translateY(0) rotateX(0);
                    }
                    .parallax {
                        overflow: hidden;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 2.5rem;
                    }
                    .section-heading h2 {
                        margin: 0 0 0.75rem;
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        color: #1F3D2B;
                    }
                    .section-heading p {
                        margin: 0;
                        font-size: 1.125rem;
                        color: rgba(31, 61, 43, 0.7);
                    }
                    .section-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
                        50% { transform: translateY(0); animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
                    }
                    @keyframes pulse {
                        50% { opacity: 0.5; }
                    }
                    @keyframes popIn {
                        from { opacity: 0; transform: scale(0) rotate(-180deg); }
                        to { opacity: 1; transform: scale(1) rotate(0); }
                    }
                    @keyframes slideDown {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
        </>
    }
}
