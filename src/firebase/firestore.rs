//! Document Store Binding
//!
//! Typed get/set/update/delete on single Firestore documents.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::{firebase_firestore, DocumentReference, DocumentSnapshot};
use crate::error::AppError;

/// Per-user profile documents, keyed by uid
pub const USERS: &str = "users";
/// Catalog documents, keyed by ISBN
pub const BOOKS: &str = "books";

fn doc_ref(collection: &str, id: &str) -> DocumentReference {
    firebase_firestore().collection(collection).doc(id)
}

/// Plain JS objects (no `Map`s, `None` as null) as Firestore expects
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, AppError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

pub async fn get_document<T: DeserializeOwned>(collection: &str, id: &str) -> Result<Option<T>, AppError> {
    let snapshot: DocumentSnapshot = JsFuture::from(doc_ref(collection, id).get()).await?.unchecked_into();
    if !snapshot.exists() {
        return Ok(None);
    }
    Ok(Some(serde_wasm_bindgen::from_value(snapshot.data())?))
}

pub async fn set_document<T: Serialize>(collection: &str, id: &str, value: &T, merge: bool) -> Result<(), AppError> {
    let data = to_js(value)?;
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("merge"), &JsValue::from_bool(merge))?;
    JsFuture::from(doc_ref(collection, id).set(&data, &options)).await?;
    tracing::debug!("[STORE] set {}/{} merge={}", collection, id, merge);
    Ok(())
}

pub async fn update_document<T: Serialize>(collection: &str, id: &str, value: &T) -> Result<(), AppError> {
    let data = to_js(value)?;
    JsFuture::from(doc_ref(collection, id).update(&data)).await?;
    tracing::debug!("[STORE] update {}/{}", collection, id);
    Ok(())
}

pub async fn delete_document(collection: &str, id: &str) -> Result<(), AppError> {
    JsFuture::from(doc_ref(collection, id).delete()).await?;
    tracing::debug!("[STORE] delete {}/{}", collection, id);
    Ok(())
}
