use wax_web::App;

fn main() {
    dioxus::launch(App);
}
