pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod store;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod period;
            pub mod point_codec;
            pub mod query;
        }
        pub mod use_cases {
            pub mod query_events_in_bounds {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod get_event_detail {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod serve_todays_snapshot {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod snapshot_files;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_queries_in_memory;
                pub mod event_queries_postgres;
            }
        }
    }
    pub mod reviews {
        pub mod core {
            pub mod review;
        }
        pub mod use_cases {
            pub mod list_reviews_for_event {
                pub mod inbound {
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod submit_review {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod repository_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod reviews_in_memory;
                pub mod reviews_postgres;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod events_in_bounds_tests;
        pub mod todays_snapshot_tests;
    }
}
