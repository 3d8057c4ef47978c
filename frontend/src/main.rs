use gloo::console;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod hooks;
mod pages;
mod services;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_util;

use components::layout::Layout;
use pages::{
    auth_user::AuthUserPage,
    generate_password::GeneratePasswordPage,
    generate_two_factor::GenerateTwoFactorPage,
};
use services::ApiProvider;

#[derive(Clone, Routable, PartialEq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    GeneratePassword,
    #[at("/generate-2fa")]
    GenerateTwoFactor,
    #[at("/auth")]
    Authenticate,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::GeneratePassword => html! { <GeneratePasswordPage /> },
        Route::GenerateTwoFactor => html! { <GenerateTwoFactorPage /> },
        Route::Authenticate => html! { <AuthUserPage /> },
        Route::NotFound => html! {
            <div class="text-center py-16">
                <h1 class="text-6xl font-bold text-gray-900">{"404"}</h1>
                <p class="text-xl mt-4 text-gray-600">{"Page introuvable"}</p>
                <Link<Route> to={Route::GeneratePassword} classes="inline-block mt-6 text-blue-600 hover:text-blue-700 font-medium">
                    {"Retour à l'accueil"}
                </Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ApiProvider>
            <BrowserRouter>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </BrowserRouter>
        </ApiProvider>
    }
}

fn load_stylesheet(href: &str) -> Result<(), JsValue> {
    let document = gloo::utils::document();
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;

    let link = document.create_element("link")?;
    link.set_attribute("href", href)?;
    link.set_attribute("rel", "stylesheet")?;
    head.append_child(&link)?;
    Ok(())
}

fn main() {
    // Tailwind utilities used by every component
    if let Err(err) = load_stylesheet("https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css") {
        console::error!("failed to load stylesheet", err);
    }

    yew::Renderer::<App>::new().render();
}
