/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::{
    error::SdkError,
    operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Input, ListObjectsV2Output},
};
use aws_smithy_runtime_api::http::Response;

use super::SearchFetchContext;

/// Paginator for the `ListObjectsV2` operation used to enumerate the whole
/// bucket. Pages are fetched one at a time, in order; no page-size assumption
/// is made.
#[derive(Debug)]
pub(super) struct ListObjectsPaginator {
    context: SearchFetchContext,
    state: Option<State>,
}

#[derive(Debug, PartialEq)]
enum State {
    Paginating { next_token: Option<String> },
    Done,
}

impl State {
    fn next_state(self, output: &ListObjectsV2Output) -> State {
        let is_truncated =
            output.is_truncated().unwrap_or(false) && output.next_continuation_token().is_some();

        match self {
            State::Paginating { next_token: _ } if is_truncated => State::Paginating {
                next_token: output.next_continuation_token.to_owned(),
            },
            _ => State::Done,
        }
    }
}

impl ListObjectsPaginator {
    pub(super) fn new(context: SearchFetchContext) -> Self {
        Self {
            context,
            state: Some(State::Paginating { next_token: None }),
        }
    }

    fn state(&self) -> &State {
        self.state.as_ref().expect("valid state")
    }

    pub(super) async fn next_page(
        &mut self,
    ) -> Option<Result<ListObjectsV2Output, SdkError<ListObjectsV2Error, Response>>> {
        let input = &self.context.state.input;
        let request = match self.state() {
            State::Done => return None,
            State::Paginating { next_token } => ListObjectsV2Input::builder()
                .set_bucket(input.bucket.to_owned())
                .set_continuation_token(next_token.clone()),
        };

        let list_result = request.send_with(self.context.client()).await;
        match list_result {
            Ok(output) => {
                let prev_state = self.state.take().expect("state set");
                let next_state = prev_state.next_state(&output);
                self.state.replace(next_state);
                Some(Ok(output))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::{operation::list_objects_v2::ListObjectsV2Output, types::Object};

    use super::State;

    /*
     * Three pages linked by continuation tokens:
     *   * [k1, k2] (token1)
     *   * [k3]     (token2)
     *   * [k4]
     */
    #[test]
    fn test_next_state() {
        let start = State::Paginating { next_token: None };

        let output1 = list_resp(Some("token1"), vec!["k1", "k2"]);
        let output2 = list_resp(Some("token2"), vec!["k3"]);
        let output3 = list_resp(None, vec!["k4"]);

        let state2 = start.next_state(&output1);
        assert_eq!(
            state2,
            State::Paginating {
                next_token: Some("token1".to_owned()),
            }
        );

        let state3 = state2.next_state(&output2);
        assert_eq!(
            state3,
            State::Paginating {
                next_token: Some("token2".to_owned()),
            }
        );

        let state4 = state3.next_state(&output3);
        assert_eq!(state4, State::Done);
    }

    /// A truncated response missing its continuation token must not paginate forever
    #[test]
    fn test_truncated_without_token_terminates() {
        let start = State::Paginating { next_token: None };

        let output = ListObjectsV2Output::builder()
            .is_truncated(true)
            .set_contents(Some(vec![Object::builder().key("k1").build()]))
            .build();

        assert_eq!(start.next_state(&output), State::Done);
    }

    #[test]
    fn test_done_is_terminal() {
        let output = list_resp(Some("token1"), vec!["k1"]);
        assert_eq!(State::Done.next_state(&output), State::Done);
    }

    fn list_resp(next_token: Option<&'static str>, keys: Vec<&'static str>) -> ListObjectsV2Output {
        let contents = keys
            .iter()
            .map(|k| Object::builder().key(*k).build())
            .collect();
        ListObjectsV2Output::builder()
            .is_truncated(next_token.is_some())
            .set_next_continuation_token(next_token.map(str::to_owned))
            .set_contents(Some(contents))
            .build()
    }
}
