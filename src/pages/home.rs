use log::info;
use yew::prelude::*;

use crate::animation::page_transition::PageTransitionProvider;
use crate::animation::preloader::Preloader;
use crate::animation::provider::AnimationProvider;
use crate::sections::comparison::TraditionalComparison;
use crate::sections::contact_form::ContactSection;
use crate::sections::features::Features;
use crate::sections::footer::Footer;
use crate::sections::header::SiteHeader;
use crate::sections::hero::Hero;
use crate::sections::luxury_clean::LuxuryClean;
use crate::sections::pricing::Pricing;
use crate::sections::product_description::ProductDescription;
use crate::sections::testimonials::Testimonials;

#[function_component(Home)]
pub fn home() -> Html {
    let is_loading = use_state(|| true);

    let on_complete = {
        let is_loading = is_loading.clone();
        Callback::from(move |_: ()| {
            info!("Landing page ready");
            is_loading.set(false);
        })
    };

    html! {
        <AnimationProvider>
            <PageTransitionProvider>
                {
                    if *is_loading {
                        html! { <Preloader on_complete={on_complete} /> }
                    } else {
                        html! {}
                    }
                }
                <main class={classes!("landing", (*is_loading).then(|| "landing--loading"))}>
                    <SiteHeader />
                    <Hero />
                    <ProductDescription />
                    <TraditionalComparison />
                    <Features />
                    <LuxuryClean />
                    <Testimonials />
                    <Pricing />
                    <ContactSection />
                    <Footer />
                </main>
                <style>
                    {r#"
                        .landing {
                            min-height: 100vh;
                            background: #F7F9F6;
                        }
                        .landing--loading {
                            height: 100vh;
                            overflow: hidden;
                        }
                    "#}
                </style>
            </PageTransitionProvider>
        </AnimationProvider>
    }
}
