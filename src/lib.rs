pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod errors;
        pub mod identity;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod user_directory;
    }
}

pub mod modules {
    pub mod time_records {
        pub mod core {
            pub mod break_ledger;
            pub mod evolve;
            pub mod ports;
            pub mod record;
            pub mod scope;
            pub mod state;
            pub mod transitions;
        }
        pub mod use_cases {
            pub mod punch {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod admin_corrections {
                pub mod commands;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod query_time_records {
                pub mod handler;
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory_records;
            }
        }
    }
}

pub mod shell;
