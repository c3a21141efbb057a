//! Diesel table definitions mirroring `backend/migrations`.

diesel::table! {
    animes (id) {
        id -> Int8,
        name -> Text,
    }
}

diesel::table! {
    users (id) {
        id -> Int8,
        name -> Text,
        username -> Text,
        password -> Text,
        authorities -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(animes, users);
