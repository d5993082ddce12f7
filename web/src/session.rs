use leptos::prelude::*;

pub const AUTH_TOKEN_STORAGE_KEY: &str = "admission_auth_token";
pub const USER_ID_STORAGE_KEY: &str = "admission_user_id";
pub const USER_NAME_STORAGE_KEY: &str = "admission_user_name";

/// Capability handed to anything that talks to the backend on the
/// applicant's behalf. Built from localStorage after login; components take
/// it as a parameter instead of reading global state.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext {
    pub token: String,
    pub user_id: i64,
    pub user_name: String,
}

/// Persists the backend session after a successful login.
pub fn store_session(token: &str, user_id: i64, user_name: &str) {
    local_storage_set(AUTH_TOKEN_STORAGE_KEY, token);
    local_storage_set(USER_ID_STORAGE_KEY, &user_id.to_string());
    local_storage_set(USER_NAME_STORAGE_KEY, user_name);
}

pub fn clear_session() {
    local_storage_remove(AUTH_TOKEN_STORAGE_KEY);
    local_storage_remove(USER_ID_STORAGE_KEY);
    local_storage_remove(USER_NAME_STORAGE_KEY);
}

/// Reads the stored session, if any. On the server there is no
/// localStorage, so this is always `None` there; auth-gated pages resolve
/// their state client-side after hydration.
pub fn current_auth() -> Option<AuthContext> {
    let token = local_storage_get(AUTH_TOKEN_STORAGE_KEY)?;
    if token.is_empty() {
        return None;
    }
    let user_id = local_storage_get(USER_ID_STORAGE_KEY)?.parse::<i64>().ok()?;
    let user_name = local_storage_get(USER_NAME_STORAGE_KEY).unwrap_or_default();
    Some(AuthContext {
        token,
        user_id,
        user_name,
    })
}

/// Hook returning the session reactively; resolves after hydration.
pub fn use_auth() -> (Signal<Option<AuthContext>>, Signal<bool>) {
    let auth = RwSignal::new(None::<AuthContext>);
    let is_loading = RwSignal::new(true);

    Effect::new(move |_| {
        auth.set(current_auth());
        is_loading.set(false);
    });

    (auth.into(), is_loading.into())
}

fn local_storage_get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn getItem(key: &str) -> Option<String>;
        }

        if let Some(value) = getItem(key) {
            return Some(value);
        }
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }

    None
}

fn local_storage_set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn setItem(key: &str, value: &str);
        }

        setItem(key, value);
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn local_storage_remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn removeItem(key: &str);
        }

        removeItem(key);
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
