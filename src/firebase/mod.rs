//! Firebase SDK Bindings
//!
//! Bindings to the Firebase compat SDK (`window.firebase`) loaded and
//! initialised by the host page, organized by service.

mod auth;
mod firestore;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // ========================
    // Auth
    // ========================

    pub type Auth;

    #[wasm_bindgen(js_namespace = firebase, js_name = auth)]
    fn firebase_auth() -> Auth;

    #[wasm_bindgen(method, getter, js_name = currentUser)]
    fn current_user(this: &Auth) -> Option<User>;

    /// Returns the unsubscribe function
    #[wasm_bindgen(method, js_name = onAuthStateChanged)]
    fn on_auth_state_changed(this: &Auth, callback: &js_sys::Function) -> js_sys::Function;

    #[wasm_bindgen(method, js_name = signInWithPopup)]
    fn sign_in_with_popup(this: &Auth, provider: &GoogleAuthProvider) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = signOut)]
    fn sign_out(this: &Auth) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = ["firebase", "auth"])]
    pub type GoogleAuthProvider;

    #[wasm_bindgen(constructor, js_namespace = ["firebase", "auth"])]
    fn new() -> GoogleAuthProvider;

    pub type User;

    #[wasm_bindgen(method, getter)]
    fn uid(this: &User) -> String;

    #[wasm_bindgen(method, getter, js_name = displayName)]
    fn display_name(this: &User) -> Option<String>;

    #[wasm_bindgen(method, getter)]
    fn email(this: &User) -> Option<String>;

    // ========================
    // Firestore
    // ========================

    pub type Firestore;

    #[wasm_bindgen(js_namespace = firebase, js_name = firestore)]
    fn firebase_firestore() -> Firestore;

    #[wasm_bindgen(method)]
    fn collection(this: &Firestore, path: &str) -> CollectionReference;

    pub type CollectionReference;

    #[wasm_bindgen(method)]
    fn doc(this: &CollectionReference, id: &str) -> DocumentReference;

    pub type DocumentReference;

    #[wasm_bindgen(method)]
    fn get(this: &DocumentReference) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    fn set(this: &DocumentReference, data: &JsValue, options: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    fn update(this: &DocumentReference, data: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    fn delete(this: &DocumentReference) -> js_sys::Promise;

    pub type DocumentSnapshot;

    #[wasm_bindgen(method, getter)]
    fn exists(this: &DocumentSnapshot) -> bool;

    #[wasm_bindgen(method)]
    fn data(this: &DocumentSnapshot) -> JsValue;
}

// Re-export all public items
pub use auth::*;
pub use firestore::*;
