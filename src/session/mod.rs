pub(crate) mod fx_session;
