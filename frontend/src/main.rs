use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod applications {
    pub mod controller;
    pub mod form;
    pub mod http_store;
    pub mod store;
}
mod components {
    pub mod application_form;
    pub mod particle_canvas;
    pub mod reveal;
    pub mod stat_counter;
    pub mod toast;
    pub mod typed_text;
    pub mod visibility;
}
mod effects {
    pub mod counter;
    pub mod reveal;
    pub mod typing;
}
mod particles {
    pub mod canvas;
    pub mod field;
    pub mod renderer;
}
mod pages {
    pub mod landing;
}
mod utils {
    pub mod api;
    pub mod logging;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Landing} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
