/// Converts a database model into its public API counterpart.
pub trait IntoApiModel {
    type ApiModel;

    fn into_api_model(self) -> Self::ApiModel;
}
