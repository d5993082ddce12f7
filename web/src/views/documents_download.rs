use leptos::prelude::*;
use shared_types::ProgramDocumentsResponse;
use thaw::*;

use crate::components::{LoadingView, SessionGuard};
use crate::server::{get_applicant_details, get_program_documents};
use crate::session::use_auth;

#[component]
pub fn DocumentsDownloadPage() -> impl IntoView {
    view! {
        <SessionGuard>
            <DocumentsDownloadContent/>
        </SessionGuard>
    }
}

#[component]
fn DocumentsDownloadContent() -> impl IntoView {
    let (auth, _) = use_auth();

    let documents_resource = Resource::new(
        move || auth.get().map(|session| session.token),
        |token_opt| async move {
            let token = token_opt?;
            let result = load_program_documents(token).await;
            Some(result)
        },
    );

    view! {
        <div class="documents-page">
            <div class="documents-header">
                <h1>"Program Documents"</h1>
                <p>"Guides and forms published for your program. Download what you need."</p>
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
                        Some(Some(Ok(listing))) => view! {
                            <ProgramDocumentList listing/>
                        }.into_any(),
                    }
                }}
            </Suspense>
        </div>
    }
}

async fn load_program_documents(token: String) -> Result<ProgramDocumentsResponse, String> {
    let details = get_applicant_details(token.clone())
        .await
        .map_err(|err| err.to_string())?;
    get_program_documents(token, details.program_id)
        .await
        .map_err(|err| err.to_string())
}

#[component]
fn ProgramDocumentList(listing: ProgramDocumentsResponse) -> impl IntoView {
    if listing.data.is_empty() {
        return view! {
            <div class="documents-empty">
                <p>"No documents have been published for your program yet."</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="documents-list">
            <h2 class="documents-program-name">{listing.program.clone()}</h2>
            {listing.data.into_iter().map(|document| {
                view! {
                    <div class="document-row">
                        <div class="document-info">
                            <span class="document-name">{document.document_name.clone()}</span>
                            <span class="document-meta">
                                {document.document_type.clone()}
                                {document.document_size.clone().map(|size| format!(" · {}", size)).unwrap_or_default()}
                            </span>
                        </div>
                        <a
                            class="document-download"
                            href=document.full_url.clone()
                            target="_blank"
                            rel="noopener"
                        >
                            "Download"
                        </a>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
