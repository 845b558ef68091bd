/// Fishing-log identifiers are 64-bit integers assigned by the server.
pub type LogId = i64;

/// User account identifier, as carried in the session token claims.
pub type UserId = i64;
