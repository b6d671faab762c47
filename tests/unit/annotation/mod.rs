mod record;
mod sanitize;
