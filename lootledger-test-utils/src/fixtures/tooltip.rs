//! Tooltip HTTP mock endpoint creation utilities.

use mockito::Mock;

use crate::TestSetup;

impl TestSetup {
    pub fn tooltip<'a>(&'a mut self) -> TooltipFixtures<'a> {
        TooltipFixtures { setup: self }
    }
}

pub struct TooltipFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> TooltipFixtures<'a> {
    /// Create a mock endpoint at `/tooltip/item/{item_id}` answering with `tooltip` as HTML.
    ///
    /// # Arguments
    /// - `item_id` - Item ID for the endpoint path
    /// - `tooltip` - HTML returned in the `tooltip` field
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_tooltip_endpoint(
        &mut self,
        item_id: i32,
        tooltip: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::json!({
            "name": "Mock item",
            "quality": 4,
            "tooltip": tooltip,
        });

        self.create_raw_tooltip_endpoint(item_id, &body.to_string(), expected_requests)
    }

    /// Create a mock endpoint at `/tooltip/item/{item_id}` answering with `body` verbatim
    pub fn create_raw_tooltip_endpoint(
        &mut self,
        item_id: i32,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/tooltip/item/{}", item_id).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/tooltip/item/{item_id}` answering with an error status
    pub fn create_failing_tooltip_endpoint(
        &mut self,
        item_id: i32,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/tooltip/item/{}", item_id).as_str())
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
