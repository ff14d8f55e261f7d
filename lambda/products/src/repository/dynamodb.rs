use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use super::ProductRepository;
use crate::error::{RepositoryError, Result};
use crate::product::{Product, ProductDraft};

type Item = HashMap<String, AttributeValue>;

/// Products table keyed by the string attribute `id`.
#[derive(Debug, Clone)]
pub struct DynamoDbProductRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbProductRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ProductRepository for DynamoDbProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>> {
        let mut products = Vec::new();
        let mut start_key: Option<Item> = None;

        // A single Scan call stops at 1 MB; follow LastEvaluatedKey to the end.
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(aws_sdk_dynamodb::Error::from)?;

            for item in output.items.unwrap_or_default() {
                products.push(product_from_item(item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(products)
    }

    async fn get_by_id(&self, id: &str) -> Result<Product> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        match output.item {
            Some(item) => product_from_item(item),
            None => Err(RepositoryError::NotFound(id.to_string())),
        }
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product> {
        let product = Product::create(draft);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(product_to_item(&product)))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        Ok(product)
    }

    async fn update_by_id(&self, id: &str, draft: ProductDraft) -> Result<Product> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .condition_expression("attribute_exists(#id)")
            .update_expression(
                "SET #title = :title, #code = :code, #price = :price, #model = :model",
            )
            .expression_attribute_names("#id", "id")
            .expression_attribute_names("#title", "title")
            .expression_attribute_names("#code", "code")
            .expression_attribute_names("#price", "price")
            .expression_attribute_names("#model", "model")
            .expression_attribute_values(":title", AttributeValue::S(draft.title))
            .expression_attribute_values(":code", AttributeValue::S(draft.code))
            .expression_attribute_values(":price", AttributeValue::N(draft.price.to_string()))
            .expression_attribute_values(":model", AttributeValue::S(draft.model))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_conditional_check_failed_exception()) =>
            {
                return Err(RepositoryError::NotFound(id.to_string()));
            }
            Err(err) => return Err(aws_sdk_dynamodb::Error::from(err).into()),
        };

        // UPDATED_NEW only carries the four written attributes.
        let mut item = output.attributes.unwrap_or_default();
        item.insert("id".to_string(), AttributeValue::S(id.to_string()));
        product_from_item(item)
    }

    async fn delete_by_id(&self, id: &str) -> Result<Product> {
        let output = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        match output.attributes {
            Some(item) if !item.is_empty() => product_from_item(item),
            _ => Err(RepositoryError::NotFound(id.to_string())),
        }
    }
}

fn product_to_item(product: &Product) -> Item {
    let mut item = HashMap::new();
    item.insert("id".to_string(), AttributeValue::S(product.id.clone()));
    item.insert("title".to_string(), AttributeValue::S(product.title.clone()));
    item.insert("code".to_string(), AttributeValue::S(product.code.clone()));
    item.insert(
        "price".to_string(),
        AttributeValue::N(product.price.to_string()),
    );
    item.insert("model".to_string(), AttributeValue::S(product.model.clone()));
    item
}

fn product_from_item(item: Item) -> Result<Product> {
    let price = item
        .get("price")
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::MalformedItem("missing number attribute price".into()))?;
    let price = price
        .parse::<f64>()
        .map_err(|_| RepositoryError::MalformedItem(format!("price is not a number: {price}")))?;

    Ok(Product {
        id: string_attr(&item, "id")?,
        title: string_attr(&item, "title")?,
        code: string_attr(&item, "code")?,
        price,
        model: string_attr(&item, "model")?,
    })
}

fn string_attr(item: &Item, name: &str) -> Result<String> {
    item.get(name)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| RepositoryError::MalformedItem(format!("missing string attribute {name}")))
}
