// End-to-end tests for the Readwise save relay.
//
// Each test spawns the relay on an ephemeral port together with its own mock
// Readwise upstream, so tests run in parallel without sharing any state. The
// mock records every save call it receives (body and Authorization header)
// and can be told to answer with an error status or to delay its response
// past the relay's timeout.
