use yew::prelude::*;

use crate::animation::page_transition::use_page_transition;

pub struct NavItem {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "About", target: "about" },
    NavItem { label: "Buy", target: "pricing" },
    NavItem { label: "Contact", target: "contact" },
];

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <div class="logo" onclick={props.onclick.clone()}>
            <div class="logo-square pop" style="animation-delay: 0.1s;"></div>
            <div class="logo-circle pop" style="animation-delay: 0.2s;"></div>
            <div class="logo-triangle pop" style="animation-delay: 0.3s;"></div>
        </div>
    }
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu_open = use_state(|| false);
    let transition = use_page_transition();

    // Anchor clicks go through the wipe; the contact form gets focus.
    let go_to = {
        let menu_open = menu_open.clone();
        let transition = transition.clone();
        move |target: &'static str| {
            let menu_open = menu_open.clone();
            let transition = transition.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                transition.navigate_to(target, target == "contact");
            })
        }
    };

    let to_top = {
        let menu_open = menu_open.clone();
        let transition = transition.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            transition.navigate_to_top();
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <>
            <header class="site-header">
                <Logo onclick={to_top} />
                <nav class="header-nav">
                    {
                        NAV_ITEMS.iter().enumerate().map(|(i, item)| html! {
                            <a
                                key={item.label}
                                href={format!("#{}", item.target)}
                                class="header-link"
                                style={format!("animation-delay: {:.1}s;", 0.3 + i as f64 * 0.1)}
                                onclick={go_to(item.target)}
                            >
                                {item.label}
                            </a>
                        }).collect::<Html>()
                    }
                </nav>
                <a href="#pricing" class="header-cta" onclick={go_to("pricing")}>{"Buy / Pricing"}</a>
                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </header>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            <div class="mobile-menu-backdrop" onclick={close_menu}></div>
                            <nav class="mobile-menu-panel">
                                {
                                    NAV_ITEMS.iter().map(|item| html! {
                                        <a key={item.label} href={format!("#{}", item.target)} class="mobile-menu-link" onclick={go_to(item.target)}>
                                            {item.label}
                                        </a>
                                    }).collect::<Html>()
                                }
                                <a href="#pricing" class="mobile-menu-cta" onclick={go_to("pricing")}>{"Buy Now"}</a>
                            </nav>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .site-header {
                        position: relative;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 2.5rem;
                        background: #F7F9F6;
                        animation: slideDown 0.6s cubic-bezier(0.25, 0.1, 0.25, 1) both;
                    }
                    .logo {
                        display: flex;
                        align-items: center;
                        gap: 0.25rem;
                        cursor: pointer;
                    }
                    .pop {
                        animation: popIn 0.5s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                    }
                    .header-nav {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .header-link {
                        position: relative;
                        color: #1F3D2B;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        animation: slideDown 0.4s ease-out both;
                        transition: color 0.2s, transform 0.2s;
                    }
                    .header-link::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -4px;
                        height: 2px;
                        background: #2E7D5A;
                        transform: scaleX(0);
                        transform-origin: left;
                        transition: transform 0.2s;
                    }
                    .header-link:hover {
                        color: #2E7D5A;
                        transform: scale(1.05);
                    }
                    .header-link:hover::after {
                        transform: scaleX(1);
                    }
                    .header-cta {
                        background: #2E7D5A;
                        color: white;
                        font-size: 0.875rem;
                        font-weight: 500;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        animation: popIn 0.5s 0.4s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                        transition: transform 0.2s, box-shadow 0.2s, background 0.2s;
                    }
                    .header-cta:hover {
                        background: #256B4C;
                        transform: scale(1.05);
                        box-shadow: 0 10px 30px rgba(46, 125, 90, 0.3);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 6px;
                        padding: 0.5rem;
                        margin-right: -0.5rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 1.5rem;
                        height: 2px;
                        background: #1F3D2B;
                        transition: transform 0.2s, opacity 0.2s;
                    }
                    .burger-menu.open span:nth-child(1) {
                        transform: translateY(8px) rotate(45deg);
                    }
                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }
                    .burger-menu.open span:nth-child(3) {
                        transform: translateY(-8px) rotate(-45deg);
                    }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                    }
                    .mobile-menu-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.2);
                        backdrop-filter: blur(4px);
                    }
                    .mobile-menu-panel {
                        position: absolute;
                        top: 4rem;
                        left: 1rem;
                        right: 1rem;
                        padding: 1rem;
                        background: rgba(255, 255, 255, 0.95);
                        border-radius: 1rem;
                        border: 1px solid rgba(159, 211, 199, 0.3);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        animation: slideDown 0.2s ease-out;
                    }
                    .mobile-menu-link,
                    .mobile-menu-cta {
                        display: block;
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        color: #1F3D2B;
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .mobile-menu-link:hover {
                        background: #E6EFEA;
                    }
                    .mobile-menu-cta {
                        margin-top: 0.5rem;
                        background: #2E7D5A;
                        color: white;
                        text-align: center;
                    }
                    @media (max-width: 768px) {
                        .site-header {
                            padding: 1rem;
                        }
                        .header-nav {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                    }
                    @media (max-width: 640px) {
                        .header-cta {
                            display: none;
                        }
                    }
                "#}
            </style>
        </>
    }
}
