use std::ops::Deref;
use std::rc::Rc;

use localboost_common::{AnalyzeAction, AnalyzeState, SubmitDecision};
use web_sys::File;
use yew::prelude::*;

use crate::api_client::HttpAnalysisService;

/// Upload-analyze state held by the view
#[derive(Clone, Default, PartialEq)]
pub struct AnalysisModel(AnalyzeState<File>);

impl Deref for AnalysisModel {
    type Target = AnalyzeState<File>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for AnalysisModel {
    type Action = AnalyzeAction<File>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.0.apply(action);
        Rc::new(next)
    }
}

/// State plus the two user actions of the analysis page
#[derive(Clone, PartialEq)]
pub struct AnalysisHandle {
    pub state: UseReducerHandle<AnalysisModel>,
    pub on_select: Callback<Option<File>>,
    pub on_submit: Callback<()>,
}

#[hook]
pub fn use_analysis() -> AnalysisHandle {
    let state = use_reducer(AnalysisModel::default);

    let on_select = {
        let state = state.clone();
        Callback::from(move |file: Option<File>| {
            match &file {
                Some(file) => log::debug!("Selected file: {} ({} bytes)", file.name(), file.size()),
                None => log::debug!("File selection cleared"),
            }
            state.dispatch(AnalyzeAction::SelectFile(file));
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| match state.prepare_submit() {
            SubmitDecision::Busy => {
                log::debug!("Submit ignored, a request is already pending");
            }
            SubmitDecision::Rejected(err) => {
                log::warn!("Submit rejected: {}", err);
                state.dispatch(AnalyzeAction::SubmitRejected(err));
            }
            SubmitDecision::Start(ticket) => {
                log::info!("Uploading {} for analysis", ticket.file().name());
                state.dispatch(AnalyzeAction::SubmitStarted(ticket.generation()));

                let dispatcher = state.dispatcher();
                let service = HttpAnalysisService::from_settings();
                wasm_bindgen_futures::spawn_local(async move {
                    let completion = ticket.run(&service).await;
                    dispatcher.dispatch(AnalyzeAction::SubmitCompleted(completion));
                });
            }
        })
    };

    AnalysisHandle { state, on_select, on_submit }
}
