use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::PortalNavBar;
use crate::views::{
    ApplyPage, DocumentsDownloadPage, DocumentsUploadPage, HomePage, InterviewPage, LoginPage,
    NotFoundPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/web.css"/>

        // sets the document title
        <Title text="Graduate Admission Portal"/>

        <ConfigProvider>
            <Router>
                <PortalNavBar/>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route
                            path=(StaticSegment("apply"), ParamSegment("uuid"))
                            view=ApplyPage
                        />
                        <Route
                            path=(StaticSegment("documents"), StaticSegment("upload"))
                            view=DocumentsUploadPage
                        />
                        <Route
                            path=(StaticSegment("documents"), StaticSegment("download"))
                            view=DocumentsDownloadPage
                        />
                        <Route path=StaticSegment("interview") view=InterviewPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
