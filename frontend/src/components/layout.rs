use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const NAV_ITEMS: [(Route, &str, &str); 3] = [
    (Route::GeneratePassword, "Générer Mot de Passe", "🔐"),
    (Route::GenerateTwoFactor, "Activer 2FA", "🔒"),
    (Route::Authenticate, "Authentification", "👤"),
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Persistent header and footer around the active page
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::NotFound);
    let mobile_menu_open = use_state(|| false);

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: ()| mobile_menu_open.set(false))
    };

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-blue-50 flex flex-col">
            <header class="bg-white shadow-sm border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <div class="flex items-center gap-2">
                            <h1 class="text-xl md:text-2xl font-bold text-blue-700">{"COFRAP Secure"}</h1>
                        </div>

                        <nav class="hidden md:flex gap-1" aria-label="Navigation principale">
                            {for NAV_ITEMS.iter().map(|(route, label, icon)| html! {
                                <NavLink
                                    route={route.clone()}
                                    label={*label}
                                    icon={*icon}
                                    current={current_route.clone()}
                                />
                            })}
                        </nav>

                        <button
                            class="md:hidden p-2 rounded-lg text-gray-600 hover:bg-gray-100"
                            onclick={toggle_mobile_menu}
                            aria-expanded={if *mobile_menu_open { "true" } else { "false" }}
                            aria-label="Menu de navigation"
                            aria-controls="mobile-menu"
                        >
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                if *mobile_menu_open {
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                } else {
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                }
                            </svg>
                        </button>
                    </div>

                    if *mobile_menu_open {
                        <nav id="mobile-menu" class="md:hidden py-4 border-t border-gray-200" aria-label="Navigation mobile">
                            <div class="flex flex-col gap-2">
                                {for NAV_ITEMS.iter().map(|(route, label, icon)| html! {
                                    <NavLink
                                        route={route.clone()}
                                        label={*label}
                                        icon={*icon}
                                        current={current_route.clone()}
                                        on_navigate={close_mobile_menu.clone()}
                                    />
                                })}
                            </div>
                        </nav>
                    }
                </div>
            </header>

            <main class="flex-1 max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8 md:py-12 w-full">
                { props.children.clone() }
            </main>

            <footer class="bg-white border-t border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                    <p class="text-center text-sm text-gray-600">
                        {format!("© {} COFRAP Secure - Système d'authentification sécurisé", year)}
                    </p>
                </div>
            </footer>
        </div>
    }
}

// ===== HELPER COMPONENTS =====

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    route: Route,
    label: &'static str,
    icon: &'static str,
    current: Route,
    #[prop_or_default]
    on_navigate: Callback<()>,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let navigator = use_navigator();
    let is_active = props.route == props.current;
    let classes = if is_active {
        "px-4 py-2 rounded-lg text-sm font-medium transition-colors bg-blue-100 text-blue-700"
    } else {
        "px-4 py-2 rounded-lg text-sm font-medium transition-colors text-gray-600 hover:bg-gray-100 hover:text-gray-900"
    };

    let onclick = {
        let route = props.route.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match &navigator {
                Some(navigator) => navigator.push(&route),
                None => console::error!("navigation requested outside of a router"),
            }
            on_navigate.emit(());
        })
    };

    html! {
        <a
            href={props.route.to_path()}
            class={classes}
            aria-current={is_active.then_some("page")}
            {onclick}
        >
            <span class="mr-2" aria-hidden="true">{props.icon}</span>
            {props.label}
        </a>
    }
}
