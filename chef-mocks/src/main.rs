fn main() {
    dioxus::launch(chef_mocks::App);
}
