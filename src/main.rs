//! PM Todos entry point
//!
//! Wires the DOM widget on wasm32; native builds just run a small in-memory
//! smoke demo of the store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, Event, HtmlInputElement};

    use pm_todos::{LocalStorage, TodoStore, UuidIds};

    type WidgetStore = TodoStore<LocalStorage, UuidIds<rand::rngs::ThreadRng>>;

    /// Rebuild the list DOM and status line from the store
    fn render(document: &Document, store: &WidgetStore) {
        let Some(list) = document.get_element_by_id("todo-list") else {
            return;
        };
        list.set_inner_html("");

        for todo in store.todos() {
            let Ok(row) = document.create_element("li") else {
                continue;
            };
            let _ = row.set_attribute("data-id", &todo.id);
            row.set_class_name(if todo.done {
                "todo-item done"
            } else {
                "todo-item"
            });

            if let Ok(checkbox) = document.create_element("input") {
                if let Ok(checkbox) = checkbox.dyn_into::<HtmlInputElement>() {
                    checkbox.set_type("checkbox");
                    checkbox.set_class_name("todo-toggle");
                    checkbox.set_checked(todo.done);
                    let _ = row.append_child(&checkbox);
                }
            }

            if let Ok(label) = document.create_element("span") {
                label.set_class_name("todo-text");
                label.set_text_content(Some(&todo.text));
                let _ = row.append_child(&label);
            }

            if let Ok(button) = document.create_element("button") {
                let _ = button.set_attribute("type", "button");
                button.set_class_name("todo-remove");
                button.set_text_content(Some("Remove"));
                let _ = row.append_child(&button);
            }

            let _ = list.append_child(&row);
        }

        // Empty-state message
        if let Some(el) = document.get_element_by_id("empty-state") {
            let class = if store.todos().is_empty() { "" } else { "hidden" };
            let _ = el.set_attribute("class", class);
        }

        // Status line
        if let Some(el) = document.get_element_by_id("todo-count") {
            el.set_text_content(Some(&format!(
                "{} item(s) in {}",
                store.todos().len(),
                WidgetStore::STORAGE_KEY
            )));
        }
    }

    /// Form submit adds the trimmed input text and clears the field
    fn setup_form(document: &Document, store: Rc<RefCell<WidgetStore>>) {
        let Some(form) = document.get_element_by_id("todo-form") else {
            return;
        };
        let Some(input) = document
            .get_element_by_id("todo-input")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            event.prevent_default();
            let document = web_sys::window().unwrap().document().unwrap();
            let mut store = store.borrow_mut();
            store.add(&input.value());
            input.set_value("");
            render(&document, &store);
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One delegated click listener on the list container dispatches
    /// toggle/remove by the row's data-id attribute
    fn setup_list_actions(document: &Document, store: Rc<RefCell<WidgetStore>>) {
        let Some(list) = document.get_element_by_id("todo-list") else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(row) = target.closest("[data-id]").ok().flatten() else {
                return;
            };
            let Some(id) = row.get_attribute("data-id") else {
                return;
            };

            let document = web_sys::window().unwrap().document().unwrap();
            let mut store = store.borrow_mut();
            if target.closest(".todo-remove").ok().flatten().is_some() {
                store.remove(&id);
            } else if target.matches(".todo-toggle").unwrap_or(false) {
                store.toggle(&id);
            } else {
                return;
            }
            render(&document, &store);
        });
        let _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("PM Todos starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let store = Rc::new(RefCell::new(TodoStore::load(
            LocalStorage::new(),
            UuidIds::new(),
        )));

        setup_form(&document, store.clone());
        setup_list_actions(&document, store.clone());

        render(&document, &store.borrow());

        log::info!("PM Todos running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("PM Todos (native) starting...");
    log::info!("Native mode has no UI - run with `trunk serve` for the web widget");

    println!("\nRunning store smoke demo...");
    demo_store();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_store() {
    use pm_todos::{MemoryStorage, TodoStore, UuidIds};

    let storage = MemoryStorage::new();
    let mut store = TodoStore::load(&storage, UuidIds::seeded(1));
    store.add("Rust");
    store.toggle("next");
    store.remove("shadcn");

    for todo in store.todos() {
        let mark = if todo.done { "x" } else { " " };
        println!("[{mark}] {}", todo.text);
    }
    println!("✓ Store smoke demo passed!");
}
