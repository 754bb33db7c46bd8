fn main() {
    dioxus::launch(charts_web::App);
}
