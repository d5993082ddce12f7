use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::ApplicantDocument;
use thaw::*;

use crate::components::{LoadingView, SessionGuard};
use crate::server::{delete_applicant_document, get_applicant_documents};
use crate::session::use_auth;

const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

#[component]
pub fn DocumentsUploadPage() -> impl IntoView {
    view! {
        <SessionGuard>
            <DocumentsUploadContent/>
        </SessionGuard>
    }
}

#[component]
fn DocumentsUploadContent() -> impl IntoView {
    let (auth, _) = use_auth();
    let reload_tick = RwSignal::new(0u32);
    let uploading = RwSignal::new(false);
    let upload_error = RwSignal::new(Option::<String>::None);

    let documents_resource = Resource::new(
        move || (auth.get().map(|session| session.token), reload_tick.get()),
        |(token_opt, _)| async move {
            let token = token_opt?;
            Some(get_applicant_documents(token).await.map_err(|e| e.to_string()))
        },
    );

    let handle_file_input = move |ev: web_sys::Event| {
        upload_error.set(None);
        let Some(session) = auth.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file_list) = input.files() else {
                return;
            };

            let mut files = Vec::new();
            for index in 0..file_list.length() {
                if let Some(file) = file_list.item(index) {
                    files.push(file);
                }
            }
            input.set_value("");

            uploading.set(true);
            let token = session.token;
            spawn_local(async move {
                for file in files {
                    if file.size() > MAX_UPLOAD_BYTES {
                        upload_error.set(Some(format!(
                            "\"{}\" is larger than the 10 MB limit.",
                            file.name()
                        )));
                        continue;
                    }
                    if let Err(message) = upload_one(&token, &file).await {
                        upload_error.set(Some(message));
                    }
                }
                uploading.set(false);
                reload_tick.update(|tick| *tick += 1);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, session);
        }
    };

    let handle_delete = move |document_id: i64, document_name: String| {
        let Some(session) = auth.get_untracked() else {
            return;
        };
        let confirmed = web_sys::window()
            .and_then(|window| {
                window
                    .confirm_with_message(&format!("Delete \"{}\"?", document_name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match delete_applicant_document(session.token, document_id).await {
                Ok(_) => reload_tick.update(|tick| *tick += 1),
                Err(err) => upload_error.set(Some(format!("Could not delete document: {}", err))),
            }
        });
    };

    view! {
        <div class="documents-page">
            <div class="documents-header">
                <h1>"My Documents"</h1>
                <p>"Upload the documents required for your application. PDF files up to 10 MB."</p>
            </div>

            {move || {
                upload_error.get().map(|msg| view! {
                    <div class="documents-error">
                        <MessageBar intent=MessageBarIntent::Error>
                            {msg}
                        </MessageBar>
                    </div>
                })
            }}

            <div class="documents-dropzone">
                <label class="documents-dropzone-label" for="document-input">
                    {move || if uploading.get() { "Uploading..." } else { "Choose files to upload" }}
                </label>
                <input
                    id="document-input"
                    type="file"
                    multiple=true
                    disabled=move || uploading.get()
                    on:change=handle_file_input
                />
            </div>

            <Suspense fallback=move || view! { <LoadingView message=None/> }>
                {move || {
                    match documents_resource.get() {
                        None | Some(None) => view! { <LoadingView message=None/> }.into_any(),
                        Some(Some(Err(message))) => view! {
                            <MessageBar intent=MessageBarIntent::Error>
                                {message}
                            </MessageBar>
                        }.into_any(),
                        Some(Some(Ok(documents))) => view! {
                            <DocumentList documents on_delete=handle_delete/>
                        }.into_any(),
                    }
                }}
            </Suspense>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn upload_one(token: &str, file: &web_sys::File) -> Result<(), String> {
    use base64::Engine;

    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("Could not read \"{}\".", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_base64 = base64::engine::general_purpose::STANDARD.encode(bytes);

    // The backend keys documents by name without the extension.
    let file_name = file.name();
    let document_name = file_name
        .split('.')
        .next()
        .unwrap_or(&file_name)
        .to_string();

    crate::server::upload_applicant_document(
        token.to_string(),
        file_name.clone(),
        document_name,
        content_base64,
    )
    .await
    .map(|_| ())
    .map_err(|_| format!("Could not upload \"{}\". Please try again.", file_name))
}

#[component]
fn DocumentList(
    documents: Vec<ApplicantDocument>,
    on_delete: impl Fn(i64, String) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    if documents.is_empty() {
        return view! {
            <div class="documents-empty">
                <p>"You have not uploaded any documents yet."</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="documents-list">
            {documents.into_iter().map(|document| {
                let document_id = document.id;
                let document_name = document.document_name.clone();
                view! {
                    <div class="document-row">
                        <div class="document-info">
                            <span class="document-name">{document.document_name.clone()}</span>
                            <span class="document-meta">
                                {document.document_size.clone().unwrap_or_default()}
                                " · "
                                {document.status.clone().unwrap_or_else(|| "pending review".to_string())}
                            </span>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| on_delete(document_id, document_name.clone())
                        >
                            "Delete"
                        </Button>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
