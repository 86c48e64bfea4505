mod responses;
mod webhooks;
