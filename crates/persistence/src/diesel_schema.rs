// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    volunteers (volunteer_id) {
        volunteer_id -> BigInt,
        phone -> Text,
        name -> Text,
        is_coordinator -> Integer,
        status -> Text,
        requested_at -> Nullable<Text>,
        approved_at -> Nullable<Text>,
        approved_by -> Nullable<BigInt>,
        removed_at -> Nullable<Text>,
        created_at -> Nullable<Text>,
    }
}

diesel::table! {
    shifts (shift_id) {
        shift_id -> BigInt,
        date -> Text,
        category -> Text,
        capacity -> Integer,
        created_at -> Nullable<Text>,
    }
}

diesel::table! {
    signups (signup_id) {
        signup_id -> BigInt,
        volunteer_id -> BigInt,
        shift_id -> BigInt,
        signed_up_at -> Text,
        dropped_at -> Nullable<Text>,
    }
}

diesel::joinable!(signups -> volunteers (volunteer_id));
diesel::joinable!(signups -> shifts (shift_id));

diesel::allow_tables_to_appear_in_same_query!(volunteers, shifts, signups);
