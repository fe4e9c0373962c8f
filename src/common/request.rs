// src/common/request.rs

use serde::Deserialize;

use crate::common::error::AppError;

// Query string crua de listagem: ?page=&limit=&search=
// page/limit chegam como texto e são convertidos manualmente para que um
// valor não-numérico vire um 400 no envelope padrão (e não uma rejeição
// genérica do axum).
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

impl ListParams {
    pub fn parse(self) -> Result<GetListRequest, AppError> {
        let page: u64 = self
            .page
            .unwrap_or_else(|| "1".to_string())
            .parse()
            .map_err(|e| AppError::BadRequest(format!("parâmetro 'page' inválido: {e}")))?;

        let limit: u64 = self
            .limit
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|e| AppError::BadRequest(format!("parâmetro 'limit' inválido: {e}")))?;

        // LIMIT e OFFSET são ligados como i64 nas queries; valores que não
        // cabem são rejeitados como qualquer outro parâmetro malformado.
        if limit > i64::MAX as u64 {
            return Err(AppError::BadRequest(
                "parâmetro 'limit' fora do intervalo suportado".to_string(),
            ));
        }

        match page.saturating_sub(1).checked_mul(limit) {
            Some(offset) if offset <= i64::MAX as u64 => {}
            _ => {
                return Err(AppError::BadRequest(
                    "parâmetro 'page' fora do intervalo suportado".to_string(),
                ));
            }
        }

        Ok(GetListRequest {
            page,
            limit,
            search: self.search.unwrap_or_default(),
        })
    }
}

// Pedido de listagem já validado, compartilhado por todos os repositórios.
#[derive(Debug, Clone, PartialEq)]
pub struct GetListRequest {
    pub page: u64,
    pub limit: u64,
    pub search: String,
}

impl GetListRequest {
    /// offset = (page - 1) * limit; page 0 é tratada como page 1.
    /// A aritmética é saturante: nunca estoura nem produz valor negativo.
    pub fn offset(&self) -> i64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64) as i64
    }

    /// Padrão `%busca%` para ILIKE, sempre passado como parâmetro ligado
    /// (nunca interpolado no texto da query).
    pub fn like_pattern(&self) -> String {
        format!("%{}%", self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_page_1_limit_10() {
        let req = ListParams::default().parse().unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 10);
        assert_eq!(req.search, "");
    }

    #[test]
    fn non_numeric_page_is_rejected() {
        let params = ListParams {
            page: Some("abc".to_string()),
            limit: None,
            search: None,
        };
        assert!(matches!(params.parse(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn non_numeric_limit_is_rejected() {
        let params = ListParams {
            page: None,
            limit: Some("dez".to_string()),
            search: None,
        };
        assert!(matches!(params.parse(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn page_beyond_supported_range_is_rejected() {
        let params = ListParams {
            page: Some(u64::MAX.to_string()),
            limit: Some("10".to_string()),
            search: None,
        };
        assert!(matches!(params.parse(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn limit_beyond_supported_range_is_rejected() {
        let params = ListParams {
            page: None,
            limit: Some(u64::MAX.to_string()),
            search: None,
        };
        assert!(matches!(params.parse(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let req = GetListRequest {
            page: u64::MAX,
            limit: 10,
            search: String::new(),
        };
        assert_eq!(req.offset(), i64::MAX);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let req = GetListRequest {
            page: 2,
            limit: 10,
            search: String::new(),
        };
        assert_eq!(req.offset(), 10);

        let first = GetListRequest {
            page: 1,
            limit: 10,
            search: String::new(),
        };
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn like_pattern_is_bound_not_interpolated() {
        // A busca vira um parâmetro de query; uma tentativa de injeção
        // permanece texto inofensivo dentro do padrão do ILIKE.
        let req = GetListRequest {
            page: 1,
            limit: 10,
            search: "'; drop table baskets; --".to_string(),
        };
        assert_eq!(req.like_pattern(), "%'; drop table baskets; --%");
    }
}
