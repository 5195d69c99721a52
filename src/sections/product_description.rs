use yew::prelude::*;

use crate::animation::reveal::FadeIn;
use crate::slider::component::BeforeAfterSlider;

#[function_component(ProductDescription)]
pub fn product_description() -> Html {
    html! {
        <section class="product-description">
            <div class="product-inner">
                <div class="product-copy">
                    <FadeIn once={false} duration={0.8} amount={0.15}>
                        <p class="product-lead">
                            {"Deep cleaning for rings, necklaces, earrings, and more with no risk of scratches."}
                        </p>
                    </FadeIn>
                    <FadeIn once={false} duration={0.8} delay={0.1} amount={0.15}>
                        <p class="product-strong">
                            {"Pure ultrasonic waves. Only water. Reveal brilliance in every fine detail."}
                        </p>
                    </FadeIn>
                </div>
                <FadeIn once={false} duration={0.8} amount={0.15}>
                    <BeforeAfterSlider />
                </FadeIn>
            </div>
            <style>
                {r#"
                    .product-description {
                        padding: 1.5rem 2.5rem;
                        background: #F7F9F6;
                    }
                    .product-inner {
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .product-copy {
                        margin-bottom: 2rem;
                    }
                    .product-lead,
                    .product-strong {
                        margin: 0;
                        color: #1F3D2B;
                        font-size: 1.25rem;
                        line-height: 1.625;
                    }
                    .product-lead {
                        font-weight: 500;
                    }
                    .product-strong {
                        margin-top: 1rem;
                        font-weight: 600;
                    }
                    @media (max-width: 640px) {
                        .product-description {
                            padding: 1rem;
                        }
                        .product-lead,
                        .product-strong {
                            font-size: 1rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
