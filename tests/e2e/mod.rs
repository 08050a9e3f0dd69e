// End-to-end tests for the Career Advisor client.
//
// Each test spins up an in-process mock of the platform backend on an
// ephemeral port and points a real client at it. The mock counts every call
// per endpoint, which is how the retry/refresh guarantees are asserted:
// "at most two requests per logical call" is a counter check, not a mock
// expectation.
//
// Tests run in parallel; every test owns its backend and session store.

mod test_request;
