pub mod application {
    pub mod catalog {
        pub mod store;
    }
    pub mod category {
        pub mod get_all;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod list;
        pub mod update;
    }
    pub mod session {
        pub mod check_session;
        pub mod login;
        pub mod logout;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod list;
            pub mod update;
        }
    }
    pub mod session {
        pub mod errors;
        pub mod model;
        pub mod service;
        pub mod use_cases {
            pub mod check_session;
            pub mod login;
            pub mod logout;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
